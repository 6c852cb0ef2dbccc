/// Line-oriented output side channel for listings and diagnostics.
pub trait Report {
    fn line(&mut self, text: &str);
}

/// Writes each line to stdout.
#[derive(Debug, Default)]
pub struct Console;

impl Report for Console {
    fn line(&mut self, text: &str) {
        println!("{text}");
    }
}

impl Report for Vec<String> {
    fn line(&mut self, text: &str) {
        self.push(text.to_string());
    }
}
