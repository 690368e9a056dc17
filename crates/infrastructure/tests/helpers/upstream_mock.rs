#![allow(dead_code)]

use hickory_proto::op::{Message, MessageType, OpCode};
use hickory_proto::rr::rdata::A;
use hickory_proto::rr::{Name, RData, Record};
use std::net::{Ipv4Addr, SocketAddr};
use std::str::FromStr;
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

/// Upstream stand-in answering every A query with fixed addresses.
pub struct MockUpstream {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockUpstream {
    pub async fn start(answers: Vec<Ipv4Addr>) -> Result<Self, std::io::Error> {
        Self::spawn(answers, false).await
    }

    /// Replies with the query ID bit-inverted.
    pub async fn start_with_wrong_id(answers: Vec<Ipv4Addr>) -> Result<Self, std::io::Error> {
        Self::spawn(answers, true).await
    }

    async fn spawn(answers: Vec<Ipv4Addr>, wrong_id: bool) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = socket.local_addr()?;

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            if let Some(response) = Self::build_response(&buf[..len], &answers, wrong_id) {
                                let _ = socket.send_to(&response, peer).await;
                            }
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    fn build_response(
        query_bytes: &[u8],
        answers: &[Ipv4Addr],
        wrong_id: bool,
    ) -> Option<Vec<u8>> {
        let query = Message::from_vec(query_bytes).ok()?;
        let question = query.queries().first()?.clone();
        let id = if wrong_id { !query.id() } else { query.id() };

        let mut response = Message::new(id, MessageType::Response, OpCode::Query);
        response.set_recursion_available(true);
        response.add_query(question.clone());
        for addr in answers {
            response.add_answer(Record::from_rdata(
                question.name().clone(),
                60,
                RData::A(A(*addr)),
            ));
        }

        response.to_vec().ok()
    }
}

impl Drop for MockUpstream {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

pub fn upstream_reply(qname: &str, answers: &[Ipv4Addr]) -> Message {
    let name = Name::from_str(qname).unwrap();
    let mut message = Message::new(4242, MessageType::Response, OpCode::Query);
    message.set_recursion_available(true);
    for addr in answers {
        message.add_answer(Record::from_rdata(name.clone(), 300, RData::A(A(*addr))));
    }
    message
}
