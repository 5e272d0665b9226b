//! Board evaluation rules.
//!
//! Pure functions over [`Board`](crate::Board): win detection over the
//! eight fixed lines and full-board detection for draws. Kept separate
//! from the engine so they can be tested in isolation.

mod draw;
mod win;

pub(crate) use draw::is_full;
pub(crate) use win::winner;
