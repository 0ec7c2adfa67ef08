//! InMemory Room Repository 実装
//!
//! Room membership as `room name -> set of connection ids`. Empty rooms are
//! dropped so the map only holds rooms with members.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{ConnectionId, RepositoryError, RoomName, RoomRepository};

/// インメモリ Room Repository 実装
#[derive(Default)]
pub struct InMemoryRoomRepository {
    rooms: Mutex<HashMap<RoomName, HashSet<ConnectionId>>>,
}

impl InMemoryRoomRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RoomRepository for InMemoryRoomRepository {
    async fn join(
        &self,
        room: &RoomName,
        connection_id: &ConnectionId,
    ) -> Result<(), RepositoryError> {
        let mut rooms = self.rooms.lock().await;
        rooms
            .entry(room.clone())
            .or_default()
            .insert(connection_id.clone());
        Ok(())
    }

    async fn leave(
        &self,
        room: &RoomName,
        connection_id: &ConnectionId,
    ) -> Result<(), RepositoryError> {
        let mut rooms = self.rooms.lock().await;
        if let Some(members) = rooms.get_mut(room) {
            members.remove(connection_id);
            if members.is_empty() {
                rooms.remove(room);
            }
        }
        Ok(())
    }

    async fn leave_all(
        &self,
        connection_id: &ConnectionId,
    ) -> Result<Vec<RoomName>, RepositoryError> {
        let mut rooms = self.rooms.lock().await;
        let mut left = Vec::new();
        rooms.retain(|room, members| {
            if members.remove(connection_id) {
                left.push(room.clone());
            }
            !members.is_empty()
        });
        left.sort();
        Ok(left)
    }

    async fn members(&self, room: &RoomName) -> Vec<ConnectionId> {
        let rooms = self.rooms.lock().await;
        let mut members: Vec<ConnectionId> = rooms
            .get(room)
            .map(|members| members.iter().cloned().collect())
            .unwrap_or_default();
        members.sort();
        members
    }
}
