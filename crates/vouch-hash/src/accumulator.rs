use digest::Digest;

/// Stateful object that consumes successive byte chunks and produces a final
/// digest value. One instance is scoped to one resource's stream.
pub trait Accumulator: Send {
    /// Absorb the next chunk of the stream.
    fn update(&mut self, data: &[u8]);

    /// Consume the accumulator and return the raw digest bytes.
    fn finalize(self: Box<Self>) -> Vec<u8>;
}

/// Adapter over any RustCrypto `Digest` implementation.
pub(crate) struct DigestAccumulator<D: Digest + Send>(pub(crate) D);

impl<D: Digest + Send> Accumulator for DigestAccumulator<D> {
    fn update(&mut self, data: &[u8]) {
        Digest::update(&mut self.0, data);
    }

    fn finalize(self: Box<Self>) -> Vec<u8> {
        self.0.finalize().to_vec()
    }
}

// blake3 exposes its own hasher type rather than the `digest` traits.
pub(crate) struct Blake3Accumulator(pub(crate) blake3::Hasher);

impl Accumulator for Blake3Accumulator {
    fn update(&mut self, data: &[u8]) {
        self.0.update(data);
    }

    fn finalize(self: Box<Self>) -> Vec<u8> {
        self.0.finalize().as_bytes().to_vec()
    }
}
