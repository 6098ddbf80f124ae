//! Static description of the two tables backing the service.
//!
//! Column names here are the single source for both the SQL the query builder emits and the
//! names rows are decoded by.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlType {
    Uuid,
    Varchar(usize),
    Timestamp,
    Boolean,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub name: &'static str,
    pub sql_type: SqlType,
    pub nullable: bool,
}

impl Column {
    const fn new(name: &'static str, sql_type: SqlType, nullable: bool) -> Self {
        Self {
            name,
            sql_type,
            nullable,
        }
    }

    pub const fn max_length(&self) -> Option<usize> {
        match self.sql_type {
            SqlType::Varchar(len) => Some(len),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Table {
    pub name: &'static str,
    pub key: Column,
    pub columns: &'static [Column],
}

pub mod dev_events {
    use super::{Column, SqlType, Table};

    pub const ID: Column = Column::new("Id", SqlType::Uuid, false);
    pub const TITLE: Column = Column::new("Title", SqlType::Varchar(100), false);
    pub const DESCRIPTION: Column = Column::new("Description", SqlType::Varchar(200), true);
    pub const START_DATE: Column = Column::new("Start_Date", SqlType::Timestamp, false);
    pub const END_DATE: Column = Column::new("End_Date", SqlType::Timestamp, false);
    pub const IS_DELETED: Column = Column::new("IsDeleted", SqlType::Boolean, false);

    pub const TABLE: Table = Table {
        name: "DevEvents",
        key: ID,
        columns: &[ID, TITLE, DESCRIPTION, START_DATE, END_DATE, IS_DELETED],
    };
}

pub mod dev_event_speakers {
    use super::{Column, SqlType, Table};

    pub const ID: Column = Column::new("Id", SqlType::Uuid, false);
    pub const DEV_EVENT_ID: Column = Column::new("DevEventId", SqlType::Uuid, false);
    pub const NAME: Column = Column::new("Name", SqlType::Varchar(100), false);
    pub const TALK_TITLE: Column = Column::new("Talk_Title", SqlType::Varchar(100), false);
    pub const TALK_DESCRIPTION: Column =
        Column::new("Talk_Description", SqlType::Varchar(200), true);
    pub const LINKEDIN_PROFILE: Column =
        Column::new("Linkedin_Profile", SqlType::Varchar(256), true);

    pub const TABLE: Table = Table {
        name: "DevEventSpeakers",
        key: ID,
        columns: &[
            ID,
            DEV_EVENT_ID,
            NAME,
            TALK_TITLE,
            TALK_DESCRIPTION,
            LINKEDIN_PROFILE,
        ],
    };
}
