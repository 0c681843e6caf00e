//! Advent of Code 2024 solutions

pub mod day_02;
pub mod day_03;
