#![allow(dead_code)]

use async_trait::async_trait;
use split_horizon_application::ports::{
    InterfaceAddressSource, InterfaceAddresses, QueryContext,
};
use split_horizon_domain::{
    AnswerRrSet, DomainError, ExtState, ModuleId, RecordType, ResponseCode, SecurityStatus,
    SyntheticResponse,
};
use std::collections::HashMap;
use std::net::Ipv4Addr;
use std::sync::{Arc, RwLock};

#[derive(Clone, Default)]
pub struct MockInterfaceAddressSource {
    addresses: Arc<RwLock<HashMap<String, Vec<String>>>>,
    lookups: Arc<RwLock<Vec<String>>>,
}

impl MockInterfaceAddressSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_addresses(self, interface: &str, addrs: &[&str]) -> Self {
        self.addresses.write().unwrap().insert(
            interface.to_string(),
            addrs.iter().map(|a| a.to_string()).collect(),
        );
        self
    }

    pub fn lookups(&self) -> Vec<String> {
        self.lookups.read().unwrap().clone()
    }
}

#[async_trait]
impl InterfaceAddressSource for MockInterfaceAddressSource {
    async fn addresses(&self, interface: &str) -> InterfaceAddresses {
        self.lookups.write().unwrap().push(interface.to_string());
        self.addresses
            .read()
            .unwrap()
            .get(interface)
            .cloned()
            .unwrap_or_default()
    }
}

pub struct MockQueryContext {
    pub qname: String,
    pub rrsets: Option<Vec<AnswerRrSet>>,
    pub installed: Option<SyntheticResponse>,
    pub reject_install: bool,
    pub security: SecurityStatus,
    pub rcode: Option<ResponseCode>,
    pub ext_states: HashMap<ModuleId, ExtState>,
    pub install_attempts: usize,
    pub pending: bool,
}

impl MockQueryContext {
    pub fn new(qname: &str) -> Self {
        Self {
            qname: qname.to_string(),
            rrsets: None,
            installed: None,
            reject_install: false,
            security: SecurityStatus::Unchecked,
            rcode: None,
            ext_states: HashMap::new(),
            install_attempts: 0,
            pending: false,
        }
    }

    pub fn with_rrsets(mut self, rrsets: Vec<AnswerRrSet>) -> Self {
        self.rrsets = Some(rrsets);
        self
    }

    /// Reports no response even when answer sets are present.
    pub fn pending_resolution(mut self) -> Self {
        self.pending = true;
        self
    }

    pub fn rejecting_install(mut self) -> Self {
        self.reject_install = true;
        self
    }

    pub fn ext_state(&self, id: ModuleId) -> Option<ExtState> {
        self.ext_states.get(&id).copied()
    }
}

impl QueryContext for MockQueryContext {
    fn qname(&self) -> &str {
        &self.qname
    }

    fn has_response(&self) -> bool {
        !self.pending && (self.rrsets.is_some() || self.installed.is_some())
    }

    fn answer_rrsets(&self) -> Option<&[AnswerRrSet]> {
        self.rrsets.as_deref()
    }

    fn install_response(&mut self, response: &SyntheticResponse) -> Result<(), DomainError> {
        self.install_attempts += 1;
        if self.reject_install {
            return Err(DomainError::SynthesisFailed("host refused response".to_string()));
        }
        self.installed = Some(response.clone());
        self.rrsets = Some(vec![AnswerRrSet::new(
            response.qname.clone(),
            RecordType::A,
            vec![response.address.octets().to_vec()],
        )]);
        Ok(())
    }

    fn set_security(&mut self, status: SecurityStatus) {
        self.security = status;
    }

    fn set_return_rcode(&mut self, rcode: ResponseCode) {
        self.rcode = Some(rcode);
    }

    fn set_ext_state(&mut self, module: ModuleId, state: ExtState) {
        self.ext_states.insert(module, state);
    }
}

pub fn a_rrset(owner: &str, addrs: &[&str]) -> AnswerRrSet {
    AnswerRrSet::new(
        owner,
        RecordType::A,
        addrs
            .iter()
            .map(|a| a.parse::<Ipv4Addr>().unwrap().octets().to_vec())
            .collect(),
    )
}

pub fn ip(s: &str) -> Ipv4Addr {
    s.parse().unwrap()
}
