// ============================================================
// Layer 5 — Recurrent Cell Selection
// ============================================================
// Experiments are configured with a cell name ("rnn", "lstm",
// "gru"). Parsing turns that name into a closed enum, so every
// later dispatch is an exhaustive match and an unknown name can
// only fail once, at the boundary.
//
//   RnnKind::Rnn  → ElmanRnn (tanh recurrence, built here)
//   RnnKind::Lstm → burn::nn::Lstm
//   RnnKind::Gru  → burn::nn::Gru
//
// All three layers take [batch, seq_len, d_input] and return
// the hidden state at every step: [batch, seq_len, d_hidden].
//
// Reference: Burn Book §3 (Building Blocks)
//            Elman (1990) Finding Structure in Time

use std::{fmt, str::FromStr};
use burn::{
    nn::{
        gru::{Gru, GruConfig},
        Linear, LinearConfig, Lstm, LstmConfig,
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::domain::error::UtilsError;

/// The recurrent cell families an experiment can use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RnnKind {
    Rnn,
    Lstm,
    Gru,
}

impl RnnKind {
    pub const ALL: [RnnKind; 3] = [RnnKind::Rnn, RnnKind::Lstm, RnnKind::Gru];

    pub fn name(self) -> &'static str {
        match self {
            RnnKind::Rnn  => "rnn",
            RnnKind::Lstm => "lstm",
            RnnKind::Gru  => "gru",
        }
    }

    /// Build a layer of this kind on `device`.
    pub fn init<B: Backend>(
        self,
        d_input:  usize,
        d_hidden: usize,
        device:   &B::Device,
    ) -> RecurrentLayer<B> {
        match self {
            RnnKind::Rnn  => RecurrentLayer::Rnn(ElmanRnn::new(d_input, d_hidden, device)),
            RnnKind::Lstm => RecurrentLayer::Lstm(LstmConfig::new(d_input, d_hidden, true).init(device)),
            RnnKind::Gru  => RecurrentLayer::Gru(GruConfig::new(d_input, d_hidden, true).init(device)),
        }
    }
}

/// Names are case-sensitive: "LSTM" is rejected.
impl FromStr for RnnKind {
    type Err = UtilsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rnn"  => Ok(RnnKind::Rnn),
            "lstm" => Ok(RnnKind::Lstm),
            "gru"  => Ok(RnnKind::Gru),
            other  => Err(UtilsError::UnknownRnnKind(other.to_string())),
        }
    }
}

impl fmt::Display for RnnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Look up a recurrent cell kind by its configuration name.
pub fn get_rnn_model_by_name(name: &str) -> Result<RnnKind, UtilsError> {
    name.parse()
}

// ─── ElmanRnn ─────────────────────────────────────────────────────────────────
/// Plain tanh recurrence: h_t = tanh(W x_t + U h_{t-1})
#[derive(Module, Debug)]
pub struct ElmanRnn<B: Backend> {
    pub input_to_hidden:  Linear<B>,
    pub hidden_to_hidden: Linear<B>,
    pub d_hidden:         usize,
}

impl<B: Backend> ElmanRnn<B> {
    pub fn new(d_input: usize, d_hidden: usize, device: &B::Device) -> Self {
        Self {
            input_to_hidden:  LinearConfig::new(d_input, d_hidden).init(device),
            hidden_to_hidden: LinearConfig::new(d_hidden, d_hidden).with_bias(false).init(device),
            d_hidden,
        }
    }

    /// x: [batch, seq_len, d_input] → [batch, seq_len, d_hidden]
    pub fn forward(&self, x: Tensor<B, 3>) -> Tensor<B, 3> {
        let [batch_size, seq_len, _] = x.dims();
        let device = x.device();

        // Project every step at once; only the recurrence is sequential
        let projected = self.input_to_hidden.forward(x);

        let mut hidden = Tensor::<B, 2>::zeros([batch_size, self.d_hidden], &device);
        let mut steps  = Vec::with_capacity(seq_len);
        for t in 0..seq_len {
            let x_t = projected
                .clone()
                .slice([0..batch_size, t..t + 1, 0..self.d_hidden])
                .reshape([batch_size, self.d_hidden]);
            hidden = burn::tensor::activation::tanh(x_t + self.hidden_to_hidden.forward(hidden));
            steps.push(hidden.clone());
        }

        if steps.is_empty() {
            return Tensor::zeros([batch_size, 0, self.d_hidden], &device);
        }
        Tensor::stack::<3>(steps, 1)
    }
}

// ─── RecurrentLayer ───────────────────────────────────────────────────────────
/// A built recurrent layer of any supported kind.
#[derive(Debug)]
pub enum RecurrentLayer<B: Backend> {
    Rnn(ElmanRnn<B>),
    Lstm(Lstm<B>),
    Gru(Gru<B>),
}

impl<B: Backend> RecurrentLayer<B> {
    pub fn kind(&self) -> RnnKind {
        match self {
            RecurrentLayer::Rnn(_)  => RnnKind::Rnn,
            RecurrentLayer::Lstm(_) => RnnKind::Lstm,
            RecurrentLayer::Gru(_)  => RnnKind::Gru,
        }
    }

    /// x: [batch, seq_len, d_input] → [batch, seq_len, d_hidden]
    pub fn forward(&self, x: Tensor<B, 3>) -> Tensor<B, 3> {
        match self {
            RecurrentLayer::Rnn(rnn)   => rnn.forward(x),
            RecurrentLayer::Lstm(lstm) => lstm.forward(x, None).0,
            RecurrentLayer::Gru(gru)   => gru.forward(x, None),
        }
    }

    /// Number of trainable parameters
    pub fn num_params(&self) -> usize {
        match self {
            RecurrentLayer::Rnn(rnn)   => rnn.num_params(),
            RecurrentLayer::Lstm(lstm) => lstm.num_params(),
            RecurrentLayer::Gru(gru)   => gru.num_params(),
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use burn::backend::NdArray;

    type TestBackend = NdArray;

    #[test]
    fn test_get_rnn_model_by_name() {
        assert_eq!(get_rnn_model_by_name("rnn").unwrap(),  RnnKind::Rnn);
        assert_eq!(get_rnn_model_by_name("lstm").unwrap(), RnnKind::Lstm);
        assert_eq!(get_rnn_model_by_name("gru").unwrap(),  RnnKind::Gru);
    }

    #[test]
    fn test_unknown_name_is_a_value_error() {
        let err = get_rnn_model_by_name("frank zappa").unwrap_err();
        assert_eq!(err.kind(), crate::domain::error::ErrorKind::Value);
        // Lookup is case-sensitive
        assert!(get_rnn_model_by_name("LSTM").is_err());
    }

    #[test]
    fn test_name_roundtrips_through_display() {
        for kind in RnnKind::ALL {
            assert_eq!(kind.to_string().parse::<RnnKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_every_kind_produces_hidden_states() {
        let device = Default::default();
        for kind in RnnKind::ALL {
            let layer = kind.init::<TestBackend>(4, 6, &device);
            assert_eq!(layer.kind(), kind);

            let x = Tensor::<TestBackend, 3>::ones([2, 5, 4], &device);
            assert_eq!(layer.forward(x).dims(), [2, 5, 6]);
        }
    }

    #[test]
    fn test_elman_param_count() {
        let device = Default::default();
        let layer  = RnnKind::Rnn.init::<TestBackend>(3, 5, &device);
        // W: 3x5 + bias 5, U: 5x5 without bias
        assert_eq!(layer.num_params(), 3 * 5 + 5 + 5 * 5);
    }
}
