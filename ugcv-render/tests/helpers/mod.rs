//! Shared helpers for ugcv-render integration tests

#![allow(dead_code)]

pub mod mp3_reader;
pub mod pcm_generator;
