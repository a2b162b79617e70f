//! Configuration for GPU context initialization.

/// Adapter and presentation options.
#[derive(Debug, Clone)]
pub struct GpuConfig {
    /// Power preference for adapter selection.
    pub power_preference: wgpu::PowerPreference,
    /// Present mode (VSync behavior).
    pub present_mode: wgpu::PresentMode,
    /// Maximum frames in flight.
    pub max_frame_latency: u32,
}

impl Default for GpuConfig {
    fn default() -> Self {
        Self {
            // A chart demo has no reason to wake the discrete GPU
            power_preference: wgpu::PowerPreference::LowPower,
            present_mode: wgpu::PresentMode::Fifo,
            max_frame_latency: 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_vsynced() {
        let config = GpuConfig::default();
        assert_eq!(config.present_mode, wgpu::PresentMode::Fifo);
        assert_eq!(config.max_frame_latency, 2);
    }
}
