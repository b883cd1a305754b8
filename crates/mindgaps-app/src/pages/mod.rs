// crates/mindgaps-app/src/pages/mod.rs
// Page components for the BridgingMindGaps site

mod home;

pub use home::HomePage;
