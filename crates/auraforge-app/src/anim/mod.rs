//! Animation timelines.
//!
//! Every animator here is a plain owned value that advances when handed an
//! instant and does nothing otherwise. There are no background tasks and no
//! shared timer handles: the screen state that owns an animator defines its
//! lifetime, so dropping the screen cancels the animation.

mod easing;
mod progress;
mod xp;

pub use easing::ease_out_quad;
pub use progress::ProgressFill;
pub use xp::RankCard;
