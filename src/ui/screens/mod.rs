mod scanner;

pub use scanner::ScannerScreen;
