//! Ordered stages of the diagnostic form

/// One of the three form steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Step {
    /// Who the prospect is
    #[default]
    Identity,
    /// Current business moment and pains
    Business,
    /// One-year goal and brand vibe
    Vision,
}

impl Step {
    pub const ALL: [Step; 3] = [Step::Identity, Step::Business, Step::Vision];

    /// 1-based ordinal
    pub fn number(&self) -> u8 {
        match self {
            Self::Identity => 1,
            Self::Business => 2,
            Self::Vision => 3,
        }
    }

    pub fn next(&self) -> Option<Self> {
        match self {
            Self::Identity => Some(Self::Business),
            Self::Business => Some(Self::Vision),
            Self::Vision => None,
        }
    }

    pub fn prev(&self) -> Option<Self> {
        match self {
            Self::Identity => None,
            Self::Business => Some(Self::Identity),
            Self::Vision => Some(Self::Business),
        }
    }

    pub fn is_last(&self) -> bool {
        self.next().is_none()
    }

    /// Label in the progress tracker
    pub fn label(&self) -> &'static str {
        match self {
            Self::Identity => "Identidade",
            Self::Business => "Negócio",
            Self::Vision => "Objetivos",
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            Self::Identity => "ETAPA_01 // O_BÁSICO",
            Self::Business => "ETAPA_02 // DIAGNÓSTICO",
            Self::Vision => "ETAPA_03 // VISÃO",
        }
    }

    pub fn question(&self) -> &'static str {
        match self {
            Self::Identity => "Como podemos te identificar?",
            Self::Business => "Qual fase descreve melhor seu momento?",
            Self::Vision => "Daqui a 1 ano, o que seria \"sucesso\"?",
        }
    }

    /// Fraction of the tracker bar filled at this step
    pub fn progress(&self) -> f64 {
        f64::from(self.number() - 1) / 2.0
    }
}
