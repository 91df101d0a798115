use crate::wire::wire_enum;

wire_enum! {
    pub enum ActivityType {
        Note => "NOTE",
        Email => "EMAIL",
        Other => "OTHER",
    }
}

wire_enum! {
    pub enum Visibility {
        AdminOnly => "ADMIN_ONLY",
        Public => "PUBLIC",
        Private => "PRIVATE",
    }
}

wire_enum! {
    pub enum AttachmentType {
        Resume => "RESUME",
        CoverLetter => "COVER_LETTER",
        OfferLetter => "OFFER_LETTER",
        Other => "OTHER",
    }
}

wire_enum! {
    pub enum OfferStatus {
        Draft => "DRAFT",
        ApprovalSent => "APPROVAL-SENT",
        Approved => "APPROVED",
        Sent => "SENT",
        SentManually => "SENT-MANUALLY",
        Opened => "OPENED",
        Denied => "DENIED",
        Signed => "SIGNED",
        Deprecated => "DEPRECATED",
    }
}

wire_enum! {
    pub enum Gender {
        Male => "MALE",
        Female => "FEMALE",
        NonBinary => "NON-BINARY",
        Other => "OTHER",
        DeclineToSelfIdentify => "DECLINE_TO_SELF_IDENTIFY",
    }
}

wire_enum! {
    pub enum Race {
        AmericanIndianOrAlaskanNative => "AMERICAN_INDIAN_OR_ALASKAN_NATIVE",
        Asian => "ASIAN",
        BlackOrAfricanAmerican => "BLACK_OR_AFRICAN_AMERICAN",
        HispanicOrLatino => "HISPANIC_OR_LATINO",
        White => "WHITE",
        NativeHawaiianOrOtherPacificIslander => "NATIVE_HAWAIIAN_OR_OTHER_PACIFIC_ISLANDER",
        TwoOrMoreRaces => "TWO_OR_MORE_RACES",
        DeclineToSelfIdentify => "DECLINE_TO_SELF_IDENTIFY",
    }
}

wire_enum! {
    pub enum VeteranStatus {
        IAmNotAProtectedVeteran => "I_AM_NOT_A_PROTECTED_VETERAN",
        IIdentifyAsOneOrMoreOfTheClassificationsOfAProtectedVeteran =>
            "I_IDENTIFY_AS_ONE_OR_MORE_OF_THE_CLASSIFICATIONS_OF_A_PROTECTED_VETERAN",
        IDontWishToAnswer => "I_DONT_WISH_TO_ANSWER",
    }
}

wire_enum! {
    pub enum DisabilityStatus {
        YesIHaveADisabilityOrPreviouslyHadADisability =>
            "YES_I_HAVE_A_DISABILITY_OR_PREVIOUSLY_HAD_A_DISABILITY",
        NoIDontHaveADisability => "NO_I_DONT_HAVE_A_DISABILITY",
        IDontWishToAnswer => "I_DONT_WISH_TO_ANSWER",
    }
}

wire_enum! {
    pub enum JobStatus {
        Open => "OPEN",
        Closed => "CLOSED",
        Draft => "DRAFT",
        Archived => "ARCHIVED",
        Pending => "PENDING",
    }
}

wire_enum! {
    pub enum JobType {
        Posting => "POSTING",
        Requisition => "REQUISITION",
        Profile => "PROFILE",
    }
}

wire_enum! {
    pub enum AccessRole {
        SuperAdmin => "SUPER_ADMIN",
        Admin => "ADMIN",
        TeamMember => "TEAM_MEMBER",
        LimitedTeamMember => "LIMITED_TEAM_MEMBER",
        Interviewer => "INTERVIEWER",
    }
}

wire_enum! {
    pub enum EmailAddressType {
        Personal => "PERSONAL",
        Work => "WORK",
        Other => "OTHER",
    }
}

wire_enum! {
    pub enum PhoneNumberType {
        Home => "HOME",
        Work => "WORK",
        Mobile => "MOBILE",
        Skype => "SKYPE",
        Other => "OTHER",
    }
}

wire_enum! {
    pub enum UrlType {
        Personal => "PERSONAL",
        Company => "COMPANY",
        Portfolio => "PORTFOLIO",
        Blog => "BLOG",
        SocialMedia => "SOCIAL_MEDIA",
        Other => "OTHER",
        JobPosting => "JOB_POSTING",
    }
}

#[cfg(test)]
mod tests {
    use super::{Gender, OfferStatus, Race};
    use crate::wire::WireEnum;

    #[test]
    fn hyphenated_wire_values_are_kept_verbatim() {
        assert_eq!(Gender::NonBinary.wire(), "NON-BINARY");
        assert_eq!(OfferStatus::ApprovalSent.wire(), "APPROVAL-SENT");
        assert_eq!(OfferStatus::SentManually.to_string(), "SENT-MANUALLY");
        assert_eq!(OfferStatus::from_wire("APPROVAL_SENT"), None);
    }

    #[test]
    fn decline_value_is_shared_across_enums() {
        assert_eq!(
            Gender::from_wire("DECLINE_TO_SELF_IDENTIFY"),
            Some(Gender::DeclineToSelfIdentify)
        );
        assert_eq!(
            Race::from_wire("DECLINE_TO_SELF_IDENTIFY"),
            Some(Race::DeclineToSelfIdentify)
        );
    }
}
