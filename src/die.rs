//! Six-sided die model.
//!
//! A die is plain data: a value per face, a color per face, and the face
//! currently showing. Randomness comes in through [`FaceSource`] so a
//! session can be seeded from the OS, from a fixed seed, or scripted.

use rand::Rng;

use crate::types::FaceColor;

/// Number of faces on every die.
pub const FACES: usize = 6;

/// Face values of the shot put die: face 1 is the foul.
pub const SHOTPUT_VALUES: [u32; FACES] = [0, 2, 3, 4, 5, 6];

/// Pip colors of the shot put die: the foul face is drawn in red.
pub const SHOTPUT_COLORS: [FaceColor; FACES] = [
    FaceColor::Red,
    FaceColor::Black,
    FaceColor::Black,
    FaceColor::Black,
    FaceColor::Black,
    FaceColor::Black,
];

// ============================================================================
// FACE SOURCES
// ============================================================================

/// Something that picks which face lands up.
///
/// Implementations must return a face index in `1..=FACES`.
pub trait FaceSource {
    fn next_face(&mut self) -> u8;
}

/// Uniform face draws from any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngFaces<R>(pub R);

impl<R: Rng> FaceSource for RngFaces<R> {
    fn next_face(&mut self) -> u8 {
        self.0.random_range(1..=FACES as u8)
    }
}

/// Plays back a fixed sequence of faces, cycling when exhausted.
#[derive(Debug, Clone)]
pub struct ScriptedFaces {
    faces: Vec<u8>,
    next: usize,
}

impl ScriptedFaces {
    /// Create a script. An empty script always lands on face 1.
    pub fn new(faces: impl Into<Vec<u8>>) -> Self {
        Self {
            faces: faces.into(),
            next: 0,
        }
    }
}

impl FaceSource for ScriptedFaces {
    fn next_face(&mut self) -> u8 {
        if self.faces.is_empty() {
            return 1;
        }
        let face = self.faces[self.next % self.faces.len()];
        self.next += 1;
        face
    }
}

// ============================================================================
// DIE
// ============================================================================

/// A six-sided die with configurable face values and pip colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Die {
    values: [u32; FACES],
    colors: [FaceColor; FACES],
    /// Face showing, always in `1..=FACES`.
    face: u8,
}

impl Die {
    /// Create a die showing face 1.
    pub fn new(values: [u32; FACES], colors: [FaceColor; FACES]) -> Self {
        Self {
            values,
            colors,
            face: 1,
        }
    }

    /// The shot put die: a red zero on face 1, 2 through 6 elsewhere.
    pub fn shotput() -> Self {
        Self::new(SHOTPUT_VALUES, SHOTPUT_COLORS)
    }

    /// Roll the die and return the value that lands up.
    pub fn roll<S: FaceSource + ?Sized>(&mut self, source: &mut S) -> u32 {
        self.face = source.next_face().clamp(1, FACES as u8);
        self.value()
    }

    /// Value of the face currently showing.
    pub fn value(&self) -> u32 {
        self.values[self.index()]
    }

    /// Face currently showing, 1-based.
    pub fn face(&self) -> u8 {
        self.face
    }

    /// Pip color of the face currently showing.
    pub fn color(&self) -> FaceColor {
        self.colors[self.index()]
    }

    pub fn face_values(&self) -> &[u32; FACES] {
        &self.values
    }

    fn index(&self) -> usize {
        usize::from(self.face) - 1
    }
}

/// A plain die: values 1 through 6, black pips.
impl Default for Die {
    fn default() -> Self {
        Self::new([1, 2, 3, 4, 5, 6], [FaceColor::Black; FACES])
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn fresh_die_shows_face_one() {
        let die = Die::shotput();
        assert_eq!(die.face(), 1);
        assert_eq!(die.value(), 0);
        assert_eq!(die.color(), FaceColor::Red);
    }

    #[test]
    fn default_die_is_standard() {
        let die = Die::default();
        assert_eq!(die.face_values(), &[1, 2, 3, 4, 5, 6]);
        assert_eq!(die.value(), 1);
        assert_eq!(die.color(), FaceColor::Black);
    }

    #[test]
    fn roll_maps_face_to_value() {
        let mut die = Die::shotput();
        let mut faces = ScriptedFaces::new([4]);
        assert_eq!(die.roll(&mut faces), 4);
        assert_eq!(die.face(), 4);
        assert_eq!(die.value(), 4);
    }

    #[test]
    fn foul_face_is_zero_and_red() {
        let mut die = Die::shotput();
        let mut faces = ScriptedFaces::new([3, 1]);
        assert_eq!(die.roll(&mut faces), 3);
        assert_eq!(die.color(), FaceColor::Black);
        assert_eq!(die.roll(&mut faces), 0);
        assert_eq!(die.color(), FaceColor::Red);
    }

    #[test]
    fn value_does_not_mutate() {
        let mut die = Die::shotput();
        die.roll(&mut ScriptedFaces::new([6]));
        assert_eq!(die.value(), 6);
        assert_eq!(die.value(), 6);
        assert_eq!(die.face(), 6);
    }

    #[test]
    fn out_of_range_faces_are_clamped() {
        let mut die = Die::shotput();
        die.roll(&mut ScriptedFaces::new([0]));
        assert_eq!(die.face(), 1);
        die.roll(&mut ScriptedFaces::new([9]));
        assert_eq!(die.face(), 6);
    }

    #[test]
    fn scripted_faces_cycle() {
        let mut faces = ScriptedFaces::new([2, 5]);
        assert_eq!(faces.next_face(), 2);
        assert_eq!(faces.next_face(), 5);
        assert_eq!(faces.next_face(), 2);
    }

    #[test]
    fn empty_script_lands_on_one() {
        let mut faces = ScriptedFaces::new(Vec::new());
        assert_eq!(faces.next_face(), 1);
    }

    #[test]
    fn rng_faces_stay_in_range() {
        let mut faces = RngFaces(StdRng::seed_from_u64(7));
        for _ in 0..1_000 {
            let face = faces.next_face();
            assert!((1..=6).contains(&face), "face {} out of range", face);
        }
    }

    #[test]
    fn rng_faces_hit_every_face() {
        let mut faces = RngFaces(StdRng::seed_from_u64(42));
        let mut seen = [false; FACES];
        for _ in 0..1_000 {
            seen[usize::from(faces.next_face()) - 1] = true;
        }
        assert!(seen.iter().all(|&s| s), "every face should come up: {:?}", seen);
    }
}
