//! GM survey and ticket table views

use dbcrust_sdk::{GmSurveyQuestionsEntry, GmTicketCategoryEntry, MAX_LOCALE_SLOTS};

use super::{entry_view, field_getters, localized_names};

entry_view! {
    /// View over one [`GmSurveyQuestionsEntry`].
    GmSurveyQuestionsView => GmSurveyQuestionsEntry
}

impl GmSurveyQuestionsView {
    field_getters! {
        id: u32 = id;
    }

    localized_names!(question[MAX_LOCALE_SLOTS] => question, default_question, QUESTION_SLOTS);
}

entry_view! {
    /// View over one [`GmTicketCategoryEntry`].
    GmTicketCategoryView => GmTicketCategoryEntry
}

impl GmTicketCategoryView {
    field_getters! {
        id: u32 = id;
    }

    localized_names!(name[MAX_LOCALE_SLOTS] => name, default_name, NAME_SLOTS);
}
