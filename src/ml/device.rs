// ============================================================
// Layer 5 — Compute Device Selection
// ============================================================
// Scripts ask for "cpu", "cuda", or nothing at all:
//
//   None   → the accelerator if one is available, else CPU
//   "cpu"  → CPU, always
//   "cuda" → the accelerator, or an error if there is none
//   other  → error
//
// Whether an accelerator exists is asked through the
// AcceleratorProbe trait, so tests can answer with a plain bool.
// SystemProbe is the real answer: it looks for the NVIDIA driver
// and respects CUDA_VISIBLE_DEVICES.
//
// The selected device maps onto the WGPU device handle used by
// the rest of the Burn code.
//
// Reference: Burn Book §2 (Backends)

use std::{env, fmt, path::Path};
use burn::backend::wgpu::WgpuDevice;
use serde::{Deserialize, Serialize};

use crate::domain::error::UtilsError;
use crate::domain::traits::AcceleratorProbe;

/// Where tensors should live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComputeDevice {
    Cpu,
    Cuda,
}

impl ComputeDevice {
    pub fn name(self) -> &'static str {
        match self {
            ComputeDevice::Cpu  => "cpu",
            ComputeDevice::Cuda => "cuda",
        }
    }

    /// The Burn WGPU device for this selection
    pub fn to_wgpu(self) -> WgpuDevice {
        match self {
            ComputeDevice::Cpu  => WgpuDevice::Cpu,
            ComputeDevice::Cuda => WgpuDevice::DiscreteGpu(0),
        }
    }
}

impl fmt::Display for ComputeDevice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolve a device name against what this machine offers.
///
/// # Errors
/// * [`UtilsError::DeviceUnavailable`] — "cuda" requested without an accelerator
/// * [`UtilsError::UnknownDevice`]     — any name other than "cpu" or "cuda"
pub fn get_device_by_name(
    name:  Option<&str>,
    probe: &impl AcceleratorProbe,
) -> Result<ComputeDevice, UtilsError> {
    let device = match name {
        None => {
            if probe.accelerator_available() {
                ComputeDevice::Cuda
            } else {
                ComputeDevice::Cpu
            }
        }
        Some("cpu") => ComputeDevice::Cpu,
        Some("cuda") => {
            if !probe.accelerator_available() {
                return Err(UtilsError::DeviceUnavailable("cuda".to_string()));
            }
            ComputeDevice::Cuda
        }
        Some(other) => return Err(UtilsError::UnknownDevice(other.to_string())),
    };

    tracing::debug!("Selected device {} (requested {:?})", device, name);
    Ok(device)
}

// ─── SystemProbe ──────────────────────────────────────────────────────────────
/// Detects an NVIDIA accelerator on the running machine.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProbe;

impl AcceleratorProbe for SystemProbe {
    fn accelerator_available(&self) -> bool {
        // An empty or "-1" mask hides every GPU from CUDA programs
        if let Ok(mask) = env::var("CUDA_VISIBLE_DEVICES") {
            let mask = mask.trim();
            if mask.is_empty() || mask == "-1" {
                return false;
            }
        }
        Path::new("/proc/driver/nvidia/version").exists() || Path::new("/dev/nvidia0").exists()
    }
}
