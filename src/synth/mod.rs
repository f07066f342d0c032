//! Panorama synthesis: the per-pixel projection loop and face sampling.

mod equirect;
mod options;
mod sampler;

pub use equirect::{panorama_texel, synthesize, synthesize_with};
pub use options::SynthOptions;
pub use sampler::{sample_bilinear, sample_two_tap, SampleFilter};
