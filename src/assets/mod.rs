pub(crate) mod decode;
pub(crate) mod filter;
pub(crate) mod glyphs;
