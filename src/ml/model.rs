use burn::{
    nn::{
        conv::{Conv2d, Conv2dConfig},
        pool::{AdaptiveAvgPool2d, AdaptiveAvgPool2dConfig},
        Dropout, DropoutConfig,
        Linear, LinearConfig,
        Relu,
    },
    prelude::*,
};

// NOTE: #[derive(Config)] already generates Clone and Serialize/Deserialize
// internally — do NOT add them again or you get conflicting impls.
#[derive(Config, Debug)]
pub struct DigitModelConfig {
    pub num_classes: usize,
    pub hidden_size: usize,
    #[config(default = "0.5")]
    pub dropout:     f64,
}

/// Channels after the second convolution
const CONV_CHANNELS: usize = 16;
/// Spatial size after adaptive pooling
const POOLED: usize = 8;

impl DigitModelConfig {
    pub fn init<B: Backend>(&self, device: &B::Device) -> DigitModel<B> {
        DigitModel {
            conv1:      Conv2dConfig::new([1, 8], [3, 3]).init(device),
            conv2:      Conv2dConfig::new([8, CONV_CHANNELS], [3, 3]).init(device),
            pool:       AdaptiveAvgPool2dConfig::new([POOLED, POOLED]).init(),
            activation: Relu::new(),
            linear1:    LinearConfig::new(CONV_CHANNELS * POOLED * POOLED, self.hidden_size).init(device),
            linear2:    LinearConfig::new(self.hidden_size, self.num_classes).init(device),
            dropout:    DropoutConfig::new(self.dropout).init(),
        }
    }
}

/// Small convolutional digit classifier.
///
/// conv(1→8) → conv(8→16) → relu → adaptive pool 8x8
///   → linear(1024→hidden) → relu → linear(hidden→classes)
///
/// Dropout only fires on autodiff backends, so inference on
/// NdArray is deterministic.
#[derive(Module, Debug)]
pub struct DigitModel<B: Backend> {
    pub conv1:      Conv2d<B>,
    pub conv2:      Conv2d<B>,
    pub pool:       AdaptiveAvgPool2d,
    pub activation: Relu,
    pub linear1:    Linear<B>,
    pub linear2:    Linear<B>,
    pub dropout:    Dropout,
}

impl<B: Backend> DigitModel<B> {
    /// images: [batch, 1, height, width] → logits: [batch, num_classes]
    pub fn forward(&self, images: Tensor<B, 4>) -> Tensor<B, 2> {
        let [batch_size, _, _, _] = images.dims();

        let x = self.conv1.forward(images);    // [batch, 8, h-2, w-2]
        let x = self.dropout.forward(x);
        let x = self.conv2.forward(x);         // [batch, 16, h-4, w-4]
        let x = self.dropout.forward(x);
        let x = self.activation.forward(x);

        let x = self.pool.forward(x);          // [batch, 16, 8, 8]
        let x = x.reshape([batch_size, CONV_CHANNELS * POOLED * POOLED]);
        let x = self.linear1.forward(x);
        let x = self.dropout.forward(x);
        let x = self.activation.forward(x);

        self.linear2.forward(x)
    }
}
