mod point;
mod px_rect;
mod rect;

#[doc(inline)]
pub use point::Point;
#[doc(inline)]
pub use px_rect::PxRect;
#[doc(inline)]
pub use rect::Rect;
