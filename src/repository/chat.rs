use diesel::prelude::*;

use crate::domain::chat::{
    ChatConversation as DomainChatConversation, ChatMessage as DomainChatMessage,
    ChatMessageListQuery, ConversationListQuery,
    NewChatConversation as DomainNewChatConversation, NewChatMessage as DomainNewChatMessage,
};
use crate::models::chat::{
    ChatConversation as DbChatConversation, ChatMessage as DbChatMessage,
    NewChatConversation as DbNewChatConversation, NewChatMessage as DbNewChatMessage,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{ChatReader, ChatWriter, DieselRepository};

impl ChatReader for DieselRepository {
    fn get_conversation_by_session_id(
        &self,
        session_id: &str,
    ) -> RepositoryResult<Option<DomainChatConversation>> {
        use crate::schema::chat_conversations;

        let Some(mut conn) = self.read_conn()? else {
            return Ok(None);
        };

        let conversation = chat_conversations::table
            .filter(chat_conversations::session_id.eq(session_id))
            .first::<DbChatConversation>(&mut conn)
            .optional()?;

        Ok(conversation.map(Into::into))
    }

    fn list_conversations(
        &self,
        query: ConversationListQuery,
    ) -> RepositoryResult<Vec<DomainChatConversation>> {
        use crate::schema::chat_conversations;

        let Some(mut conn) = self.read_conn()? else {
            return Ok(Vec::new());
        };

        let mut items = chat_conversations::table
            .filter(chat_conversations::restaurant_id.eq(query.restaurant_id))
            .into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(status) = query.status {
            items = items.filter(chat_conversations::status.eq(status.as_str()));
        }

        let rows = items
            .order(chat_conversations::updated_at.desc())
            .load::<DbChatConversation>(&mut conn)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    fn list_messages(
        &self,
        query: ChatMessageListQuery,
    ) -> RepositoryResult<Vec<DomainChatMessage>> {
        use crate::schema::chat_messages;

        let Some(mut conn) = self.read_conn()? else {
            return Ok(Vec::new());
        };

        let scoped = chat_messages::table
            .filter(chat_messages::conversation_id.eq(query.conversation_id));

        let rows = match query.last {
            Some(n) => {
                // Creation time alone is too coarse a tiebreak; ids are
                // monotonic within a conversation.
                let mut recent = scoped
                    .order((chat_messages::created_at.desc(), chat_messages::id.desc()))
                    .limit(n as i64)
                    .load::<DbChatMessage>(&mut conn)?;
                recent.reverse();
                recent
            }
            None => scoped
                .order((chat_messages::created_at.asc(), chat_messages::id.asc()))
                .load::<DbChatMessage>(&mut conn)?,
        };

        Ok(rows.into_iter().map(Into::into).collect())
    }
}

impl ChatWriter for DieselRepository {
    fn find_or_create_conversation(
        &self,
        new_conversation: &DomainNewChatConversation,
    ) -> RepositoryResult<DomainChatConversation> {
        use crate::schema::chat_conversations;

        let mut conn = self.write_conn()?;

        // The unique index on session_id makes this race-free: losers of a
        // concurrent insert fall through to the select below.
        diesel::insert_into(chat_conversations::table)
            .values(&DbNewChatConversation::from(new_conversation))
            .on_conflict(chat_conversations::session_id)
            .do_nothing()
            .execute(&mut conn)?;

        let row = chat_conversations::table
            .filter(chat_conversations::session_id.eq(new_conversation.session_id.as_str()))
            .first::<DbChatConversation>(&mut conn)
            .optional()?;

        row.map(Into::into).ok_or(RepositoryError::NotFound)
    }

    fn create_message(
        &self,
        new_message: &DomainNewChatMessage,
    ) -> RepositoryResult<DomainChatMessage> {
        use crate::schema::{chat_conversations, chat_messages};

        let mut conn = self.write_conn()?;

        let created = diesel::insert_into(chat_messages::table)
            .values(&DbNewChatMessage::from(new_message))
            .get_result::<DbChatMessage>(&mut conn)?;

        // Keep the owner's conversation list sorted by recency.
        diesel::update(
            chat_conversations::table
                .filter(chat_conversations::id.eq(new_message.conversation_id)),
        )
        .set(chat_conversations::updated_at.eq(created.created_at))
        .execute(&mut conn)?;

        Ok(created.into())
    }
}
