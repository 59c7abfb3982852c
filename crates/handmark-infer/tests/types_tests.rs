use handmark_infer::{HandLandmarkIndex, HandResult, Landmark, HAND_LANDMARK_COUNT, PIXEL_SENTINEL};

#[test]
fn test_hand_landmark_count() {
    assert_eq!(HAND_LANDMARK_COUNT, 21);
    assert_eq!(HandLandmarkIndex::ALL.len(), HAND_LANDMARK_COUNT);
}

#[test]
fn test_hand_landmark_index_values() {
    for (i, index) in HandLandmarkIndex::ALL.iter().enumerate() {
        assert_eq!(usize::from(*index), i);
    }
    assert_eq!(usize::from(HandLandmarkIndex::Wrist), 0);
    assert_eq!(usize::from(HandLandmarkIndex::IndexFingerTip), 8);
    assert_eq!(usize::from(HandLandmarkIndex::PinkyTip), 20);
}

#[test]
fn test_hand_landmark_index_try_from() {
    assert_eq!(HandLandmarkIndex::try_from(4).unwrap(), HandLandmarkIndex::ThumbTip);
    assert_eq!(HandLandmarkIndex::try_from(12).unwrap(), HandLandmarkIndex::MiddleFingerTip);
    assert!(HandLandmarkIndex::try_from(21).is_err());
    assert!(HandLandmarkIndex::try_from(100).unwrap_err().contains("0-20"));
}

#[test]
fn test_fingertips() {
    let tips: Vec<_> = HandLandmarkIndex::ALL.iter().filter(|i| i.is_fingertip()).collect();
    assert_eq!(tips.len(), 5);
    assert!(!HandLandmarkIndex::Wrist.is_fingertip());
}

#[test]
fn test_hand_result_lookup() {
    let hand = HandResult {
        landmarks: (0..HAND_LANDMARK_COUNT)
            .map(|i| Landmark { x: i as f32 / 100.0, y: 0.0, z: 0.0, px: i as i32, py: 0 })
            .collect(),
    };

    assert_eq!(hand.landmark(HandLandmarkIndex::RingFingerDip).unwrap().px, 15);
    assert_eq!(HandResult::default().landmark(HandLandmarkIndex::Wrist), None);
}

#[test]
fn test_landmark_pixel_sentinel() {
    let placed = Landmark { x: 0.5, y: 0.5, z: 0.0, px: 10, py: 20 };
    let outside = Landmark { x: 1.5, y: 0.5, z: 0.0, px: PIXEL_SENTINEL, py: PIXEL_SENTINEL };

    assert_eq!(placed.pixel(), Some((10, 20)));
    assert_eq!(outside.pixel(), None);
}

#[test]
fn test_landmark_record_has_five_fields() {
    let lm = Landmark { x: 0.1, y: 0.2, z: 0.3, px: PIXEL_SENTINEL, py: PIXEL_SENTINEL };
    let json = serde_json::to_value(lm).unwrap();
    let fields = json.as_object().unwrap();

    assert_eq!(fields.len(), 5);
    for key in ["x", "y", "z", "px", "py"] {
        assert!(fields.contains_key(key));
    }
    assert_eq!(fields["px"], -1);
}
