#![allow(dead_code)]
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, UdpSocket};
use tokio::sync::oneshot;

pub const RCODE_NOERROR: u8 = 0;
pub const RCODE_SERVFAIL: u8 = 2;
pub const RCODE_NXDOMAIN: u8 = 3;

pub const TYPE_A: u16 = 1;
pub const TYPE_TXT: u16 = 16;
pub const TYPE_AAAA: u16 = 28;
pub const TYPE_SRV: u16 = 33;
pub const TYPE_ANY: u16 = 255;

#[derive(Clone, Debug)]
pub struct MockAnswer {
    pub rtype: u16,
    pub rdata: Vec<u8>,
}

impl MockAnswer {
    pub fn a(octets: [u8; 4]) -> Self {
        Self {
            rtype: TYPE_A,
            rdata: octets.to_vec(),
        }
    }

    pub fn srv(priority: u16, weight: u16, port: u16, target: &str) -> Self {
        let mut rdata = Vec::new();
        rdata.extend_from_slice(&priority.to_be_bytes());
        rdata.extend_from_slice(&weight.to_be_bytes());
        rdata.extend_from_slice(&port.to_be_bytes());
        rdata.extend(encode_name(target));
        Self {
            rtype: TYPE_SRV,
            rdata,
        }
    }

    pub fn txt(text: &str) -> Self {
        let mut rdata = vec![text.len() as u8];
        rdata.extend_from_slice(text.as_bytes());
        Self {
            rtype: TYPE_TXT,
            rdata,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct MockReply {
    pub rcode: u8,
    pub authoritative: bool,
    pub truncated: bool,
    pub answers: Vec<MockAnswer>,
    /// Reply with a transaction id that does not match the query.
    pub wrong_id: bool,
}

impl MockReply {
    pub fn answers(answers: Vec<MockAnswer>) -> Self {
        Self {
            answers,
            ..Default::default()
        }
    }

    pub fn rcode(rcode: u8) -> Self {
        Self {
            rcode,
            ..Default::default()
        }
    }
}

/// What the mock saw: question type and whether it came over TCP.
#[derive(Clone, Copy, Debug)]
pub struct MockQuery {
    pub qtype: u16,
    pub over_tcp: bool,
}

type Handler = Arc<dyn Fn(MockQuery) -> MockReply + Send + Sync>;

/// Local DNS server on UDP and TCP (same port) that builds raw replies
/// from a handler.
pub struct MockDnsServer {
    addr: SocketAddr,
    udp_queries: Arc<AtomicUsize>,
    tcp_queries: Arc<AtomicUsize>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start<F>(handler: F) -> Result<Self, std::io::Error>
    where
        F: Fn(MockQuery) -> MockReply + Send + Sync + 'static,
    {
        let socket = UdpSocket::bind("127.0.0.1:0").await?;
        let addr = socket.local_addr()?;
        let listener = TcpListener::bind(addr).await?;

        let handler: Handler = Arc::new(handler);
        let udp_queries = Arc::new(AtomicUsize::new(0));
        let tcp_queries = Arc::new(AtomicUsize::new(0));
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        let udp_count = Arc::clone(&udp_queries);
        let tcp_count = Arc::clone(&tcp_queries);

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => break,
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            udp_count.fetch_add(1, Ordering::SeqCst);
                            if let Some(response) = respond(&handler, &buf[..len], false) {
                                let _ = socket.send_to(&response, peer).await;
                            }
                        }
                    }
                    result = listener.accept() => {
                        if let Ok((mut stream, _)) = result {
                            tcp_count.fetch_add(1, Ordering::SeqCst);
                            let handler = Arc::clone(&handler);
                            tokio::spawn(async move {
                                let mut len_buf = [0u8; 2];
                                if stream.read_exact(&mut len_buf).await.is_err() {
                                    return;
                                }
                                let mut query = vec![0u8; u16::from_be_bytes(len_buf) as usize];
                                if stream.read_exact(&mut query).await.is_err() {
                                    return;
                                }
                                if let Some(response) = respond(&handler, &query, true) {
                                    let _ = stream.write_all(&(response.len() as u16).to_be_bytes()).await;
                                    let _ = stream.write_all(&response).await;
                                }
                            });
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            udp_queries,
            tcp_queries,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn udp_queries(&self) -> usize {
        self.udp_queries.load(Ordering::SeqCst)
    }

    pub fn tcp_queries(&self) -> usize {
        self.tcp_queries.load(Ordering::SeqCst)
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

fn respond(handler: &Handler, query: &[u8], over_tcp: bool) -> Option<Vec<u8>> {
    let question_end = question_end(query)?;
    let qtype = u16::from_be_bytes([query[question_end - 4], query[question_end - 3]]);
    let reply = handler(MockQuery { qtype, over_tcp });
    Some(build_response(query, question_end, &reply))
}

fn question_end(query: &[u8]) -> Option<usize> {
    let mut pos = 12;
    loop {
        let len = *query.get(pos)? as usize;
        pos += 1;
        if len == 0 {
            break;
        }
        pos += len;
    }
    let end = pos + 4;
    (end <= query.len()).then_some(end)
}

fn build_response(query: &[u8], question_end: usize, reply: &MockReply) -> Vec<u8> {
    let mut response = Vec::with_capacity(512);

    if reply.wrong_id {
        response.extend_from_slice(&[query[0] ^ 0xff, query[1]]);
    } else {
        response.extend_from_slice(&query[0..2]);
    }

    let mut flags = 0x80 | (query[2] & 0x01);
    if reply.authoritative {
        flags |= 0x04;
    }
    if reply.truncated {
        flags |= 0x02;
    }
    response.push(flags);
    response.push(0x80 | (reply.rcode & 0x0f));

    response.extend_from_slice(&[0x00, 0x01]);
    response.extend_from_slice(&(reply.answers.len() as u16).to_be_bytes());
    response.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]);
    response.extend_from_slice(&query[12..question_end]);

    for answer in &reply.answers {
        response.extend_from_slice(&[0xc0, 0x0c]);
        response.extend_from_slice(&answer.rtype.to_be_bytes());
        response.extend_from_slice(&[0x00, 0x01, 0x00, 0x00, 0x00, 0x3c]);
        response.extend_from_slice(&(answer.rdata.len() as u16).to_be_bytes());
        response.extend_from_slice(&answer.rdata);
    }

    response
}

pub fn encode_name(name: &str) -> Vec<u8> {
    let mut bytes = Vec::new();
    for label in name.trim_end_matches('.').split('.') {
        bytes.push(label.len() as u8);
        bytes.extend_from_slice(label.as_bytes());
    }
    bytes.push(0);
    bytes
}
