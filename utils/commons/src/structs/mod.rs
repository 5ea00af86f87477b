use super::*;

mod percentage;
mod splits;

pub use self::{percentage::*, splits::*};
