mod toc;
mod highlight;
mod paginate;
mod resize;

pub use toc::handle_toc_command;
pub use highlight::handle_highlight_command;
pub use paginate::handle_paginate_command;
pub use resize::handle_resize_command;
