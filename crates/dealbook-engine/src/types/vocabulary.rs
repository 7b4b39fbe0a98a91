//! Fixed label vocabularies.
//!
//! Every enum here serializes as its display label ("On Track",
//! "Series A", ...) so the data feed reads the way the dashboard shows it.
//! Filters compare these labels with exact, case-sensitive equality.
//!
//! Stage vocabularies are ordered but transitions between stages are not
//! enforced anywhere; the order only drives display and sorting.

use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        $name:ident, $vocab:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $label:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $label)] $variant, )+
        }

        impl $name {
            /// Every value, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The display label.
            #[must_use]
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $label, )+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = EngineError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str() == s)
                    .ok_or_else(|| EngineError::unknown_label($vocab, s))
            }
        }
    };
}

vocabulary! {
    /// The programme a deal belongs to.
    DealKind, "deal kind" {
        /// Joint venture with a corporate partner.
        JointVenture => "Joint Venture",
        /// Venture studio build.
        Studio => "Studio",
        /// Accelerator cohort investment.
        Accelerator => "Accelerator",
    }
}

vocabulary! {
    /// Health label shown on every deal and round.
    DealStatus, "deal status" {
        /// Progressing to plan.
        OnTrack => "On Track",
        /// Needs attention.
        AtRisk => "At Risk",
        /// Paused by agreement.
        OnHold => "On Hold",
        /// Finished; no further action expected.
        Completed => "Completed",
    }
}

vocabulary! {
    /// Lifecycle stage of a studio or accelerator deal.
    Stage, "stage" {
        /// Studio: idea and founding team.
        Inception => "Inception",
        /// Studio: product build.
        Build => "Build",
        /// Studio: growth.
        Scale => "Scale",
        /// Studio: sold or spun out.
        Exit => "Exit",
        /// Accelerator: applied to the programme.
        Application => "Application",
        /// Accelerator: under review.
        DueDiligence => "Due Diligence",
        /// Accelerator: in the cohort.
        ActiveProgram => "Active Program",
        /// Accelerator: graduated.
        PostProgram => "Post-Program",
        /// Accelerator: received follow-on funding.
        FollowOn => "Follow-on",
        /// Accelerator: position realised.
        Exited => "Exited",
    }
}

vocabulary! {
    /// Financing round label.
    RoundType, "round type" {
        /// Pre-seed.
        PreSeed => "Pre-Seed",
        /// Seed.
        Seed => "Seed",
        /// Series A.
        SeriesA => "Series A",
        /// Series B.
        SeriesB => "Series B",
        /// Series C.
        SeriesC => "Series C",
        /// Bridge financing between priced rounds.
        Bridge => "Bridge",
    }
}

vocabulary! {
    /// Legal document category.
    DocumentType, "document type" {
        /// Shareholder agreement.
        ShareholderAgreement => "Shareholder Agreement",
        /// Term sheet.
        TermSheet => "Term Sheet",
        /// Board minutes.
        BoardMinutes => "Board Minutes",
        /// Financial statement.
        FinancialStatement => "Financial Statement",
        /// Subscription agreement.
        SubscriptionAgreement => "Subscription Agreement",
        /// Non-disclosure agreement.
        Nda => "NDA",
        /// Articles of association.
        ArticlesOfAssociation => "Articles of Association",
        /// Side letter.
        SideLetter => "Side Letter",
    }
}

vocabulary! {
    /// Where a legal document is in its signing lifecycle.
    DocumentStatus, "document status" {
        /// Being drafted.
        Draft => "Draft",
        /// Out for signature.
        PendingSignature => "Pending Signature",
        /// Signed by all parties.
        Executed => "Executed",
        /// Replaced by a later version.
        Superseded => "Superseded",
    }
}

vocabulary! {
    /// An event in a document's audit trail.
    AuditAction, "audit action" {
        /// First upload.
        Uploaded => "Uploaded",
        /// Opened by a user.
        Viewed => "Viewed",
        /// New version saved.
        Edited => "Edited",
        /// Signature captured.
        Signed => "Signed",
        /// Shared outside the team.
        Shared => "Shared",
    }
}

vocabulary! {
    /// Category of a dashboard alert.
    AlertKind, "alert kind" {
        /// Agreement renewal or termination notice.
        Renewal => "Renewal",
        /// Statutory filing due.
        Filing => "Filing",
        /// Contractual deadline.
        Deadline => "Deadline",
        /// Partner not contacted recently.
        StaleContact => "Stale Contact",
    }
}

impl Stage {
    /// The deal kind whose vocabulary contains this stage.
    #[must_use]
    pub fn kind(&self) -> DealKind {
        match self {
            Stage::Inception | Stage::Build | Stage::Scale | Stage::Exit => DealKind::Studio,
            _ => DealKind::Accelerator,
        }
    }

    /// The ordered stage vocabulary for a deal kind.
    ///
    /// Joint ventures carry no stages.
    #[must_use]
    pub fn vocabulary(kind: DealKind) -> &'static [Stage] {
        match kind {
            DealKind::JointVenture => &[],
            DealKind::Studio => &[Stage::Inception, Stage::Build, Stage::Scale, Stage::Exit],
            DealKind::Accelerator => &[
                Stage::Application,
                Stage::DueDiligence,
                Stage::ActiveProgram,
                Stage::PostProgram,
                Stage::FollowOn,
                Stage::Exited,
            ],
        }
    }

    /// Zero-based position within this stage's own vocabulary.
    #[must_use]
    pub fn ordinal(&self) -> usize {
        Self::vocabulary(self.kind())
            .iter()
            .position(|s| s == self)
            .unwrap_or(0)
    }

    /// True for exited studio deals and graduated accelerator companies.
    #[must_use]
    pub fn is_concluded(&self) -> bool {
        matches!(
            self,
            Stage::Exit | Stage::PostProgram | Stage::FollowOn | Stage::Exited
        )
    }
}
