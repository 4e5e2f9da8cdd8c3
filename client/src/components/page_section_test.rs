use super::*;

#[test]
fn section_class_marks_alternating_sections() {
    assert_eq!(section_class(Section::About), "section");
    assert_eq!(section_class(Section::Projects), "section alt");
    assert_eq!(section_class(Section::Skills), "section");
    assert_eq!(section_class(Section::Contact), "section alt");
}
