pub mod aid;
pub mod calculation;
pub mod calculator;
pub mod catalog;
pub mod dwelling;
pub mod energy_class;
pub mod settings;
