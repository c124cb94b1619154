#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use soroban_sdk::{contract, contractimpl, log, symbol_short, Env, String};

mod storage;

pub use storage::{Certificate, CertificateLedger, InstanceLedger, UNSET};

const PREFIX: &[u8] = b"Certificate: ";
const SEPARATOR: &[u8] = b" got ";

/// Overwrite the current certificate and return its confirmation line.
///
/// Both slots are replaced unconditionally; nothing about the previous
/// certificate survives.
pub fn issue<L: CertificateLedger>(env: &Env, ledger: &L, name: &String, award: &String) -> String {
    ledger.set_student(name);
    ledger.set_award(award);
    confirmation(env, name, award)
}

/// `"Certificate: " + name + " got " + award`, byte for byte.
pub fn confirmation(env: &Env, name: &String, award: &String) -> String {
    let mut buf = Vec::with_capacity(
        PREFIX.len() + SEPARATOR.len() + name.len() as usize + award.len() as usize,
    );
    buf.extend_from_slice(PREFIX);
    push_string(&mut buf, name);
    buf.extend_from_slice(SEPARATOR);
    push_string(&mut buf, award);
    String::from_bytes(env, &buf)
}

fn push_string(buf: &mut Vec<u8>, s: &String) {
    let start = buf.len();
    buf.resize(start + s.len() as usize, 0);
    s.copy_into_slice(&mut buf[start..]);
}

/// Registry holding the single current certificate of achievement.
#[contract]
pub struct CertificateOfAchievement;

#[contractimpl]
impl CertificateOfAchievement {
    /// Seed both slots with `"none"` when the instance is deployed.
    pub fn __constructor(env: Env) {
        let ledger = InstanceLedger::new(&env);
        let unset = String::from_str(&env, UNSET);
        ledger.set_student(&unset);
        ledger.set_award(&unset);
    }

    // ========================================================================
    // Issuance
    // ========================================================================

    /// Replace the current certificate with `name` / `award`.
    ///
    /// Any caller may issue; there is no authorization check.
    pub fn issue_cert(env: Env, name: String, award: String) -> String {
        let ledger = InstanceLedger::new(&env);
        let confirmation = issue(&env, &ledger, &name, &award);
        ledger.extend_ttl();

        log!(&env, "certificate issued", name, award);
        env.events().publish((symbol_short!("issued"),), (name, award));

        confirmation
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Get the current recipient
    pub fn student(env: Env) -> String {
        InstanceLedger::new(&env).student()
    }

    /// Get the current award
    pub fn award(env: Env) -> String {
        InstanceLedger::new(&env).award()
    }

    /// Both slots as a single record
    pub fn certificate(env: Env) -> Certificate {
        let ledger = InstanceLedger::new(&env);
        Certificate {
            student: ledger.student(),
            award: ledger.award(),
        }
    }
}
