//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to [`DbError`].

use std::fmt::Debug;

use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::get_item::GetItemError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;

use crate::error::DbError;

/// Map a GetItem SDK error to DbError.
pub fn map_get_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<GetItemError, R>,
) -> DbError {
    if let SdkError::DispatchFailure(failure) = &err {
        return DbError::ConnectionFailed(format!("{:?}", failure));
    }
    match err.into_service_error() {
        GetItemError::ResourceNotFoundException(_) => {
            DbError::QueryFailed("Table not found".to_string())
        }
        GetItemError::ProvisionedThroughputExceededException(_) => {
            DbError::QueryFailed("Throughput exceeded, please retry".to_string())
        }
        GetItemError::RequestLimitExceeded(_) => {
            DbError::QueryFailed("Request limit exceeded, please retry".to_string())
        }
        GetItemError::InternalServerError(_) => {
            DbError::QueryFailed("DynamoDB internal server error".to_string())
        }
        err => DbError::QueryFailed(format!("GetItem failed: {:?}", err)),
    }
}

/// Map a PutItem SDK error to DbError.
pub fn map_put_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<PutItemError, R>,
) -> DbError {
    if let SdkError::DispatchFailure(failure) = &err {
        return DbError::ConnectionFailed(format!("{:?}", failure));
    }
    match err.into_service_error() {
        PutItemError::ResourceNotFoundException(_) => {
            DbError::QueryFailed("Table not found".to_string())
        }
        PutItemError::ProvisionedThroughputExceededException(_) => {
            DbError::QueryFailed("Throughput exceeded, please retry".to_string())
        }
        PutItemError::RequestLimitExceeded(_) => {
            DbError::QueryFailed("Request limit exceeded, please retry".to_string())
        }
        PutItemError::ItemCollectionSizeLimitExceededException(_) => {
            DbError::QueryFailed("Item collection size limit exceeded".to_string())
        }
        PutItemError::TransactionConflictException(_) => {
            DbError::QueryFailed("Transaction conflict, please retry".to_string())
        }
        PutItemError::InternalServerError(_) => {
            DbError::QueryFailed("DynamoDB internal server error".to_string())
        }
        err => DbError::QueryFailed(format!("PutItem failed: {:?}", err)),
    }
}
