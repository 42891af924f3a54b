pub mod collect;
pub mod register;
pub mod scaffold;
