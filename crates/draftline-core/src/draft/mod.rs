// Draft model: ranked players, pick history, pick order, and the derived
// available-pool and user-roster views.

pub mod order;
pub mod pick;
pub mod player;
pub mod roster;
