#![cfg(test)]

mod fixtures;
mod catalog;
mod export;
mod files;
