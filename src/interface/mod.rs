// Interface layer: CLI surface
pub mod cli;
