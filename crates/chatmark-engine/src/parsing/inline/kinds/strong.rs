/// Bold emphasis. Opens and closes on the same line.
pub struct Strong;

impl Strong {
    pub const MARK: &'static [u8] = b"**";
}
