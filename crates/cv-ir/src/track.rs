//! Owner identity for channels.

slotmap::new_key_type! {
    /// Key identifying the sequencer track that owns a channel.
    ///
    /// The channel never resolves this key; it only stores and reports it
    /// so the driver can tell which logical voice a channel serves.
    pub struct TrackKey;
}
