mod image_probe_port;

pub use image_probe_port::ImageProbePort;
