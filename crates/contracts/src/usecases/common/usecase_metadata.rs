/// Identification of a UseCase for menus and page titles
pub trait UseCaseMetadata {
    /// Index, e.g. "u001"
    fn usecase_index() -> &'static str;

    /// Technical name, e.g. "place_order"
    fn usecase_name() -> &'static str;

    /// Name shown in the UI
    fn display_name() -> &'static str;

    /// Full name like "u001_place_order"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
