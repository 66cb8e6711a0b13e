pub mod a001_satellite;
