pub mod scoring;
pub mod sequencer;
pub mod stop;
