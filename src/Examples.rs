/// rate law presets and walkthroughs
pub mod kinetics_examples;
