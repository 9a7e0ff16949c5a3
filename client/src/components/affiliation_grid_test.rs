use super::*;

#[test]
fn variants_share_base_classes() {
    for variant in [GridVariant::Compact, GridVariant::Expanded] {
        assert!(variant.container_class().starts_with("affiliation-grid "));
        assert!(variant.logo_box_class().starts_with("affiliation-grid__logo-box "));
    }
    assert_ne!(GridVariant::Compact.container_class(), GridVariant::Expanded.container_class());
}
