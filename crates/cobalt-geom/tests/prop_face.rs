use cobalt_geom::Face;
use proptest::prelude::*;

fn arb_face() -> impl Strategy<Value = Face> {
    (0usize..6).prop_map(|i| Face::ALL[i])
}

proptest! {
    // Rotation commutes with taking the opposite face
    #[test]
    fn rotate_commutes_with_opposite(face in arb_face()) {
        prop_assert_eq!(face.rotate_cw().opposite(), face.opposite().rotate_cw());
    }

    // Display output parses back to the same face regardless of case
    #[test]
    fn display_parse_roundtrip(face in arb_face(), lower in any::<bool>()) {
        let text = if lower { face.to_string().to_lowercase() } else { face.to_string() };
        prop_assert_eq!(text.parse::<Face>(), Ok(face));
    }

    // Counter-clockwise undoes clockwise
    #[test]
    fn ccw_inverts_cw(face in arb_face(), turns in 0usize..8) {
        let mut f = face;
        for _ in 0..turns { f = f.rotate_cw(); }
        for _ in 0..turns { f = f.rotate_ccw(); }
        prop_assert_eq!(f, face);
    }
}
