use soroban_sdk::{contracttype, symbol_short, Env, String, Symbol};

pub(crate) const DAY_IN_LEDGERS: u32 = 17280;
pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

/// Value held by both slots until the first certificate is issued.
pub const UNSET: &str = "none";

pub(crate) const STUDENT: Symbol = symbol_short!("student");
pub(crate) const AWARD: Symbol = symbol_short!("award");

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Certificate {
    pub student: String,
    pub award: String,
}

/// Access to the two certificate slots owned by the host ledger.
pub trait CertificateLedger {
    fn student(&self) -> String;
    fn award(&self) -> String;
    fn set_student(&self, name: &String);
    fn set_award(&self, award: &String);
}

/// Ledger backed by the contract's instance storage.
pub struct InstanceLedger<'a> {
    env: &'a Env,
}

impl<'a> InstanceLedger<'a> {
    pub fn new(env: &'a Env) -> Self {
        Self { env }
    }

    pub fn extend_ttl(&self) {
        self.env
            .storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
    }

    fn get_or_unset(&self, key: &Symbol) -> String {
        self.env
            .storage()
            .instance()
            .get(key)
            .unwrap_or_else(|| String::from_str(self.env, UNSET))
    }
}

impl CertificateLedger for InstanceLedger<'_> {
    fn student(&self) -> String {
        self.get_or_unset(&STUDENT)
    }

    fn award(&self) -> String {
        self.get_or_unset(&AWARD)
    }

    fn set_student(&self, name: &String) {
        self.env.storage().instance().set(&STUDENT, name);
    }

    fn set_award(&self, award: &String) {
        self.env.storage().instance().set(&AWARD, award);
    }
}
