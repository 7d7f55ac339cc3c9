use rand::rngs::StdRng;
use rand::SeedableRng;
use relativist_core::color::to_hex;
use relativist_core::export::ArtifactCard;
use relativist_core::session::session_from_root;

#[test]
fn card_fills_only_played_cells() {
    let mut s = session_from_root(&mut StdRng::seed_from_u64(1), 7, 200.0);
    s.record(0, 90).unwrap();
    s.record(15, 71).unwrap();

    let card = ArtifactCard::from_session(&s);
    assert_eq!(card.label, "07");
    assert_eq!(card.file_name, "relativist-session-07.png");
    assert_eq!(card.resonance, 81); // 80.5
    assert_eq!(card.share_text, "Session 07 \u{b7} 81% Resonance");
    assert_eq!(card.cells.len(), 16);
    assert_eq!(card.cells[0].as_deref(), Some(to_hex(s.palette[0]).as_str()));
    assert_eq!(card.cells[15].as_deref(), Some(to_hex(s.palette[15]).as_str()));
    assert!(card.cells[1..15].iter().all(Option::is_none));
    assert_eq!(card.rows().count(), 4);
    assert_eq!(card.fingerprint.len(), 16);
}

#[test]
fn unplayed_session_has_zero_resonance() {
    let s = session_from_root(&mut StdRng::seed_from_u64(2), 12, 10.0);
    let card = ArtifactCard::from_session(&s);
    assert_eq!(card.resonance, 0);
    assert_eq!(card.label, "12");

    let json = card.to_json().unwrap();
    assert!(json.contains("\"fileName\""));
    assert!(json.contains("\"shareText\""));
}
