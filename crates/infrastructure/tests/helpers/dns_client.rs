#![allow(dead_code)]
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{Name, RecordType};
use hickory_proto::serialize::binary::BinEncodable;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpStream, UdpSocket};
use tokio::time::timeout;

const QUERY_ID: u16 = 0x4242;
const CLIENT_TIMEOUT: Duration = Duration::from_secs(5);

fn build_query(name: &str, record_type: RecordType) -> Vec<u8> {
    let mut message = Message::new();
    message
        .set_id(QUERY_ID)
        .set_message_type(MessageType::Query)
        .set_op_code(OpCode::Query)
        .set_recursion_desired(true);
    message.add_query(Query::query(Name::from_str(name).unwrap(), record_type));
    message.to_bytes().unwrap()
}

pub async fn query_udp(server: SocketAddr, name: &str, record_type: RecordType) -> Message {
    let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    socket
        .send_to(&build_query(name, record_type), server)
        .await
        .unwrap();

    let mut buf = [0u8; 4096];
    let (len, _) = timeout(CLIENT_TIMEOUT, socket.recv_from(&mut buf))
        .await
        .expect("no UDP response")
        .unwrap();
    let response = Message::from_vec(&buf[..len]).unwrap();
    assert_eq!(response.id(), QUERY_ID);
    response
}

pub async fn query_tcp(server: SocketAddr, name: &str, record_type: RecordType) -> Message {
    let mut stream = TcpStream::connect(server).await.unwrap();
    let query = build_query(name, record_type);
    stream
        .write_all(&(query.len() as u16).to_be_bytes())
        .await
        .unwrap();
    stream.write_all(&query).await.unwrap();

    let mut len = [0u8; 2];
    timeout(CLIENT_TIMEOUT, stream.read_exact(&mut len))
        .await
        .expect("no TCP response")
        .unwrap();
    let mut buf = vec![0u8; u16::from_be_bytes(len) as usize];
    stream.read_exact(&mut buf).await.unwrap();

    let response = Message::from_vec(&buf).unwrap();
    assert_eq!(response.id(), QUERY_ID);
    response
}
