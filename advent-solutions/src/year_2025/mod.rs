//! Advent of Code 2025 solutions

pub mod day_01;
