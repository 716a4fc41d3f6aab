//! Decoded CAN frame as delivered by the transport layer.

/// Maximum payload length of a classic CAN frame.
pub const CAN_MAX_DLC: usize = 8;

/// A decoded classic CAN frame.
///
/// The transport layer extracts the arbitration identifier, the physical bus
/// index, and the payload from the wire format before handing the frame to a
/// safety policy. The payload is stored in a fixed 8-byte buffer; bytes past
/// `dlc` are zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanFrame {
    /// Arbitration identifier.
    pub id: u32,
    /// Physical bus index the frame was received on or is addressed to.
    pub bus: u8,
    /// Data length code (0..=8).
    pub dlc: u8,
    /// Payload bytes; only the first `dlc` bytes are meaningful.
    pub data: [u8; CAN_MAX_DLC],
}

impl CanFrame {
    /// Build a frame from a payload slice. Payloads longer than
    /// [`CAN_MAX_DLC`] are truncated; shorter payloads leave the remaining
    /// bytes zero.
    pub fn new(id: u32, bus: u8, payload: &[u8]) -> Self {
        let mut data = [0u8; CAN_MAX_DLC];
        let len = payload.len().min(CAN_MAX_DLC);
        data[..len].copy_from_slice(&payload[..len]);
        Self {
            id,
            bus,
            dlc: len as u8,
            data,
        }
    }

    /// Payload byte at `index`, reading zero past the DLC.
    ///
    /// Recognized identifiers are inspected at fixed offsets; the transport
    /// layer guarantees full DLC for them, and unrecognized identifiers are
    /// never inspected. Reading zero keeps the decode total anyway.
    #[inline]
    pub fn byte(&self, index: usize) -> u8 {
        if index < usize::from(self.dlc) {
            self.data.get(index).copied().unwrap_or(0)
        } else {
            0
        }
    }

    /// The meaningful payload bytes.
    pub fn payload(&self) -> &[u8] {
        let len = usize::from(self.dlc).min(CAN_MAX_DLC);
        &self.data[..len]
    }
}
