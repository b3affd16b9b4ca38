pub mod commands {
    pub mod check_in;
    pub mod check_out;
}
pub mod spots;
pub mod state;
pub mod stores;
pub mod vehicles;
