pub(crate) mod crop;
pub(crate) mod engine;
pub(crate) mod frame;
pub(crate) mod paint;
pub(crate) mod raster;
pub(crate) mod stickers;
pub(crate) mod watermark;
