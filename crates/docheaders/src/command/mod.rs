pub mod decode;
pub mod fix_page;
pub mod headers;
pub mod toc;
