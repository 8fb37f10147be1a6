use cm_core::Image;
use cm_tone::invert_u8;

/// Final orientation of the three framed plates.
#[derive(Debug, Clone, PartialEq)]
pub struct Plates {
    pub front: Image<u8>,
    pub back: Image<u8>,
    pub middle: Image<u8>,
}

/// Mirrors the face plates for casting and inverts the vent layer so the
/// channel walls become the cut value expected by vectorization.
pub fn compose(front: &Image<u8>, back: &Image<u8>, vent: &Image<u8>) -> Plates {
    Plates {
        front: front.flip_horizontal(),
        back: back.flip_horizontal(),
        middle: invert_u8(&vent.as_view()),
    }
}
