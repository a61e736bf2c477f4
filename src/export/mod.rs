pub(crate) mod animated;
pub(crate) mod static_image;
