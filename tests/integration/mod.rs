//! Integration tests for the boardkit binary

mod config_layers;
mod output_formats;
mod test_utils;
