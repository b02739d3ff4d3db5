#![allow(dead_code)]
use hickory_proto::op::{Message, MessageType, OpCode};
use hickory_proto::rr::rdata::{A, CNAME, NS};
use hickory_proto::rr::{Name, RData, Record};
use hickory_proto::serialize::binary::BinEncodable;
use std::net::{Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, UdpSocket};
use tokio::sync::oneshot;

/// Builds the reply for a decoded request. `None` means stay silent.
/// The bool is true when the request arrived over TCP.
pub type Handler = Arc<dyn Fn(&Message, bool) -> Option<Message> + Send + Sync>;

/// Loopback DNS server answering on UDP and TCP at the same port.
pub struct MockDnsServer {
    addr: SocketAddr,
    udp_queries: Arc<AtomicUsize>,
    tcp_queries: Arc<AtomicUsize>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start<F>(handler: F) -> Result<Self, std::io::Error>
    where
        F: Fn(&Message, bool) -> Option<Message> + Send + Sync + 'static,
    {
        let handler: Handler = Arc::new(handler);
        let socket = UdpSocket::bind("127.0.0.1:0").await?;
        let addr = socket.local_addr()?;
        let listener = TcpListener::bind(addr).await?;

        let udp_queries = Arc::new(AtomicUsize::new(0));
        let tcp_queries = Arc::new(AtomicUsize::new(0));
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        let udp_count = udp_queries.clone();
        let tcp_count = tcp_queries.clone();
        tokio::spawn(async move {
            let mut buf = vec![0u8; 4096];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            udp_count.fetch_add(1, Ordering::SeqCst);
                            if let Some(reply) = Self::answer(&handler, &buf[..len], false) {
                                let _ = socket.send_to(&reply, peer).await;
                            }
                        }
                    }
                    accepted = listener.accept() => {
                        if let Ok((mut stream, _)) = accepted {
                            tcp_count.fetch_add(1, Ordering::SeqCst);
                            let handler = handler.clone();
                            tokio::spawn(async move {
                                let mut len_buf = [0u8; 2];
                                if stream.read_exact(&mut len_buf).await.is_err() {
                                    return;
                                }
                                let mut request = vec![0u8; u16::from_be_bytes(len_buf) as usize];
                                if stream.read_exact(&mut request).await.is_err() {
                                    return;
                                }
                                if let Some(reply) = Self::answer(&handler, &request, true) {
                                    let _ = stream.write_all(&(reply.len() as u16).to_be_bytes()).await;
                                    let _ = stream.write_all(&reply).await;
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

    fn answer(handler: &Handler, request: &[u8], over_tcp: bool) -> Option<Vec<u8>> {
        let request = Message::from_vec(request).ok()?;
        handler(&request, over_tcp)?.to_vec().ok()
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

pub fn name(s: &str) -> Name {
    Name::from_str(s).unwrap()
}

/// Empty response echoing the request's id and question.
pub fn reply_to(request: &Message) -> Message {
    let mut reply = Message::new(request.id(), MessageType::Response, OpCode::Query);
    for query in request.queries() {
        reply.add_query(query.clone());
    }
    reply
}

pub fn a_record(owner: &str, ip: Ipv4Addr) -> Record {
    Record::from_rdata(name(owner), 300, RData::A(A(ip)))
}

pub fn cname_record(owner: &str, target: &str) -> Record {
    Record::from_rdata(name(owner), 300, RData::CNAME(CNAME(name(target))))
}

pub fn ns_record(zone: &str, host: &str) -> Record {
    Record::from_rdata(name(zone), 172800, RData::NS(NS(name(host))))
}
