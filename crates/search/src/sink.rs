//! Result sinks for streamed search output

/// Receives formatted match records in ingestion order
pub trait ResultSink {
    /// Take one match record
    fn accept(&mut self, record: String);
}

impl ResultSink for Vec<String> {
    fn accept(&mut self, record: String) {
        self.push(record);
    }
}
