use super::*;

#[test]
fn every_section_has_fields() {
    for section in WrappedSection::ALL {
        assert!(!WrappedField::of(section).is_empty(), "{}", section.key());
    }
    assert_eq!(WrappedField::of(WrappedSection::Stats).len(), 4);
}

#[test]
fn set_writes_only_its_own_field() {
    let mut data = WrappedData::default();
    WrappedField::HiddenMessage.set(&mut data, "Surprise!".to_owned());
    assert_eq!(WrappedField::HiddenMessage.get(&data), "Surprise!");
    assert_eq!(WrappedField::WelcomeMessage.get(&data), "Message here");
    assert_eq!(data.hidden.title, "Title here");
}

#[test]
fn long_text_fields_are_multiline() {
    assert!(WrappedField::WelcomeMessage.multiline());
    assert!(WrappedField::StatsDescription.multiline());
    assert!(!WrappedField::StatsLabel.multiline());
    assert_eq!(WrappedField::StatsLabel.label(), "Label");
}
