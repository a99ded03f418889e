//! Musical scales for pitch quantization

/// Musical scale: pitch-class intervals in semitones above a root note.
#[derive(Debug, Clone)]
pub struct Scale {
    name: String,
    root: i32,
    intervals: Vec<u8>,
}

impl Scale {
    /// Create a new scale
    pub fn new(name: &str, root: i32, intervals: Vec<u8>) -> Self {
        Self {
            name: name.to_string(),
            root,
            intervals,
        }
    }

    /// Major scale
    pub fn major(root: i32) -> Self {
        Self::new("major", root, vec![0, 2, 4, 5, 7, 9, 11])
    }

    /// Natural minor scale
    pub fn minor(root: i32) -> Self {
        Self::new("minor", root, vec![0, 2, 3, 5, 7, 8, 10])
    }

    /// Major pentatonic scale (root, M2, M3, P5, M6)
    pub fn major_pentatonic(root: i32) -> Self {
        Self::new("major_pentatonic", root, vec![0, 2, 4, 7, 9])
    }

    /// Minor pentatonic scale (root, m3, P4, P5, m7)
    pub fn minor_pentatonic(root: i32) -> Self {
        Self::new("minor_pentatonic", root, vec![0, 3, 5, 7, 10])
    }

    /// Dorian mode
    pub fn dorian(root: i32) -> Self {
        Self::new("dorian", root, vec![0, 2, 3, 5, 7, 9, 10])
    }

    /// Whole tone scale
    pub fn whole_tone(root: i32) -> Self {
        Self::new("whole_tone", root, vec![0, 2, 4, 6, 8, 10])
    }

    /// Get scale by name
    pub fn from_name(name: &str, root: i32) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "major" => Some(Self::major(root)),
            "minor" | "natural_minor" => Some(Self::minor(root)),
            "major_pentatonic" | "majorpentatonic" => Some(Self::major_pentatonic(root)),
            "pentatonic" | "minor_pentatonic" | "minorpentatonic" => {
                Some(Self::minor_pentatonic(root))
            }
            "dorian" => Some(Self::dorian(root)),
            "whole_tone" | "wholetone" => Some(Self::whole_tone(root)),
            _ => None,
        }
    }

    /// Get the name of this scale
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the root note
    pub fn root(&self) -> i32 {
        self.root
    }

    /// Get the intervals
    pub fn intervals(&self) -> &[u8] {
        &self.intervals
    }

    /// Check whether a note belongs to the scale, in any octave.
    pub fn contains(&self, note: i32) -> bool {
        let pitch_class = (note - self.root).rem_euclid(12) as u8;
        self.intervals.contains(&pitch_class)
    }

    /// Greatest scale member at or below `note`.
    ///
    /// Floor quantization: the result never exceeds the input, so
    /// quantizing near the top of a range cannot overshoot it.
    pub fn floor_to(&self, note: i32) -> i32 {
        if self.intervals.is_empty() {
            return note;
        }
        let mut candidate = note;
        while !self.contains(candidate) {
            candidate -= 1;
        }
        candidate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_creation() {
        let scale = Scale::minor_pentatonic(45);
        assert_eq!(scale.name(), "minor_pentatonic");
        assert_eq!(scale.root(), 45);
        assert_eq!(scale.intervals(), &[0, 3, 5, 7, 10]);
    }

    #[test]
    fn test_scale_from_name() {
        assert!(Scale::from_name("major", 36).is_some());
        assert!(Scale::from_name("minor_pentatonic", 36).is_some());
        assert!(Scale::from_name("dorian", 36).is_some());
        assert!(Scale::from_name("unknown", 36).is_none());
    }

    #[test]
    fn test_contains_any_octave() {
        let scale = Scale::major(36); // C2 major
        assert!(scale.contains(36));
        assert!(scale.contains(48)); // C3
        assert!(scale.contains(24)); // C1
        assert!(scale.contains(40)); // E2
        assert!(!scale.contains(37)); // C#2
    }

    #[test]
    fn test_floor_to_member_is_identity() {
        let scale = Scale::major(36);
        for note in [36, 38, 40, 41, 43, 45, 47, 48, 60] {
            assert_eq!(scale.floor_to(note), note);
        }
    }

    #[test]
    fn test_floor_to_snaps_down() {
        let scale = Scale::major(36); // members near C2: 36 38 40 41 43 45 47
        assert_eq!(scale.floor_to(37), 36);
        assert_eq!(scale.floor_to(39), 38);
        assert_eq!(scale.floor_to(42), 41);
        assert_eq!(scale.floor_to(46), 45);
    }

    #[test]
    fn test_floor_to_never_increases() {
        let scale = Scale::minor_pentatonic(40);
        for note in 0..=120 {
            let quantized = scale.floor_to(note);
            assert!(quantized <= note);
            assert!(scale.contains(quantized));
        }
    }

    #[test]
    fn test_floor_to_offset_root() {
        // Dorian on 37: pitch class 11 below the root is not a member.
        let scale = Scale::dorian(37);
        assert!(!scale.contains(60));
        assert_eq!(scale.floor_to(60), 59);
    }
}
